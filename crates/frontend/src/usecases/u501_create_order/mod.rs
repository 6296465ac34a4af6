mod view;

pub use view::CreateOrderDialog;
