mod work_order_repository;

pub use work_order_repository::WorkOrderRepository;
