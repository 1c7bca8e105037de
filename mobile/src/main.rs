use dioxus::prelude::*;

use ui::KisanSarthiApp;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        KisanSarthiApp {}
    }
}
