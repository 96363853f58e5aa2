/// Binary entrypoint for the `arrsort` executable.
///
/// Keeps the binary thin. All logic lives in the `arrsort_lib` crate so unit
/// tests can import library functions directly.
fn main() {
    arrsort_lib::run();
}
