pub mod generate_questions_request;
pub mod generate_questions_route;
