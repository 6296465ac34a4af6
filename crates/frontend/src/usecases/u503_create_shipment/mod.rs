mod view;

pub use view::CreateShipmentDialog;
