fn main() {
    reset_portal_frontend::run();
}
