pub mod dialogflow_service;
