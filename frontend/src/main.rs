use landing::pages::landing::Landing;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Landing>::new().render();
}
