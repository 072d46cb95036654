// third-party imports
use criterion::criterion_main;

const ND: &str = ":"; // name delimiter

mod wildcard;

criterion_main!(wildcard::benches);
