use hexadmin_frontend::ConsoleApp;

fn main() {
    hexadmin_frontend::logging::init();
    yew::Renderer::<ConsoleApp>::new().render();
}
