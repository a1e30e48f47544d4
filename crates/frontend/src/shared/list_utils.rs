use std::cmp::Ordering;

pub trait Searchable {
    /// `filter` arrives trimmed and lowercased
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Case-insensitive filter; a blank filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(filter)
        }
    }

    impl Sortable for Item {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Item("Alpha", 1), Item("beta", 2)];
        assert_eq!(filter_list(items.clone(), "  ALP "), vec![Item("Alpha", 1)]);
        assert_eq!(filter_list(items.clone(), ""), items);
    }

    #[test]
    fn test_sort_list() {
        let mut items = vec![Item("a", 2), Item("b", 1), Item("c", 3)];
        sort_list(&mut items, "n", false);
        assert_eq!(items.iter().map(|i| i.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "id", true), " ⇅");
    }
}
