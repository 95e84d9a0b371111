pub mod interactive_chat_request;
pub mod interactive_chat_route;
