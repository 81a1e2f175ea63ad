fn main() {
    clinic_admin_frontend::run();
}
