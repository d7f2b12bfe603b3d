pub mod list_messages;
pub mod send_message;
