pub mod model;
pub mod view;

pub use model::{use_uploaded_documents, MedicalRecord, UploadedDocument, UploadedDocuments};
pub use view::DocumentUploadPage;
