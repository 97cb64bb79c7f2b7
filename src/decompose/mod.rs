pub(crate) mod svd;
