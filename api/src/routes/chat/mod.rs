pub mod chat_request;
pub mod chat_route;
pub mod intent_params;
