pub mod common;
pub mod u501_create_order;
pub mod u502_record_payment;
pub mod u503_create_shipment;
pub mod u504_process_return;
