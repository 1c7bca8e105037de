use dioxus::prelude::*;

use ui::KisanSarthiApp;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "KisanSarthi" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        KisanSarthiApp {}
    }
}
