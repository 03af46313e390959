use chrono::{Duration, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use foliobot::intent::classify;
use foliobot::memory::ConversationMemory;
use foliobot::types::ChatMessage;

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_trim");

    for sessions in [100usize, 1_000, 10_000] {
        let now = Utc::now();
        let mut memory = ConversationMemory::default();
        for i in 0..sessions {
            let key = format!("session-{i}");
            let messages = (0..20).map(|n| ChatMessage::user(format!("message {n}")));
            memory.append(&key, messages, now - Duration::minutes(30));
        }
        let target = format!("session-{}", sessions - 1);

        group.bench_with_input(BenchmarkId::from_parameter(sessions), &sessions, |b, _| {
            b.iter(|| {
                memory.append(&target, [ChatMessage::user("ping")], now);
                black_box(memory.trim(black_box(&target), now));
            });
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let messages = [
        "Are you hiring for a junior AI engineer position?",
        "How did you build the inventory system architecture?",
        "Tell me about his favourite music and hobbies outside of work",
    ];

    c.bench_function("classify", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(classify(black_box(message)));
            }
        });
    });
}

criterion_group!(benches, bench_trim, bench_classify);
criterion_main!(benches);
