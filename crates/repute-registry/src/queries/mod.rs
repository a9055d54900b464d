pub mod link_ops;
