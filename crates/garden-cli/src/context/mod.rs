mod app_context;
mod project_root;

pub use app_context::AppContext;
