pub mod categories;
pub mod category_dto;
pub mod category_response;
pub mod create_category_request;
pub mod update_category_request;
