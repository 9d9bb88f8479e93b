pub mod num_traits_impls;
pub mod std_ops;

#[cfg(feature = "simba")]
pub mod simba_impls;
