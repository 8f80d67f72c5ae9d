fn main() {
    streetfood_frontend::start();
}
