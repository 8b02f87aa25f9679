#![allow(warnings)]
//! Smart Menu Frontend Entry Point

mod api;
mod app;
mod clock;
mod components;
mod context;
mod i18n;
mod pages;
mod poll;
mod router;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
