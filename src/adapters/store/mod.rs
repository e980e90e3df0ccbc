//! In-memory stores and the JSON knowledge-file loader.

mod in_memory_consultation_store;
mod in_memory_rule_store;
mod in_memory_visa_type_directory;
mod knowledge_file;

pub use in_memory_consultation_store::InMemoryConsultationStore;
pub use in_memory_rule_store::InMemoryRuleStore;
pub use in_memory_visa_type_directory::InMemoryVisaTypeDirectory;
pub use knowledge_file::{load_knowledge, KnowledgeFiles};
