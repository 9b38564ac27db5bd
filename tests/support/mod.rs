#![allow(dead_code)]

pub mod feed;
