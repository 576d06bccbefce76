use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tweetcorpus::cleaning::normalize;
use tweetcorpus::filtering::TokenGate;
use tweetcorpus::lang::Lang;
use tweetcorpus::tokenizer::Moses;

pub fn clean_benchmark(c: &mut Criterion) {
    let dummy = "RT @someone: This is a completely innocent tweet... https://t.co/AbCdEf123 #innocent \
    pic.twitter.com/xYz987 and it's got @another_one's mention too!!";
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(dummy))));

    let gate = TokenGate::new(Moses::new(&Lang::parse("en").unwrap()), 10);
    let cleaned = normalize(dummy);
    c.bench_function("tokenize", |b| b.iter(|| gate.admit(black_box(&cleaned))));
}

criterion_group!(benches, clean_benchmark);
criterion_main!(benches);
