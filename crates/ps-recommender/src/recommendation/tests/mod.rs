mod adjustment;
mod common;
