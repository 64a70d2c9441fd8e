fn main() {
    mcnc_installer::run_cli();
}
