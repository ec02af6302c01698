pub mod model_service;
pub mod page_renderer;
pub mod quiz_generator_service;
pub mod quiz_page_service;
pub mod quiz_parser;
pub mod video_url;
