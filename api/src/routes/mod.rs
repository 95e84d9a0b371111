pub mod api_chat_route;
pub mod chat;
pub mod generate_questions;
pub mod home_route;
pub mod interactive_chat;
pub mod reset_session_route;
