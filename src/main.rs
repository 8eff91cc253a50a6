mod app;
mod components;
mod config;
mod nav;
mod pages;
mod store;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
