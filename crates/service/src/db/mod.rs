pub mod post_details_service;
pub mod post_service;
