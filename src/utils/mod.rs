pub mod jwt;
pub mod lifecycle;
pub mod payhere;
pub mod stay;
pub mod tenant;
