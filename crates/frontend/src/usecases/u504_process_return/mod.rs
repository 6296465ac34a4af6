mod view;

pub use view::ProcessReturnDialog;
