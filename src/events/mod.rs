mod lifecycle;
mod start;

pub use lifecycle::wire_page_lifecycle;
pub use start::wire_start_button;
