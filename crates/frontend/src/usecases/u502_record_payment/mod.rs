mod view;

pub use view::RecordPaymentDialog;
