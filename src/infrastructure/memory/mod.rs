pub mod contact_repository_memory;
