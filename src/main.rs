mod app_config;
mod boot;
mod copy_link;
mod page;
mod preview_view;
mod toast;

fn main() {
    console_error_panic_hook::set_once();
    boot::start();
}
