use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tuvi_base::placement::{PlacementContext, place_all};
use tuvi_base::{
    BirthInput, BirthRecord, Branch, Gender, RingDirection, build_chart, cuc_for, generate_chart,
    year_pillar,
};
use tuvi_calendar::LunarDate;

fn record() -> BirthRecord {
    BirthRecord {
        full_name: "Bench".to_string(),
        lunar_date: LunarDate {
            year: 1985,
            month: 12,
            day: 25,
            is_leap_month: false,
        },
        solar_date: None,
        hour: Branch::Ty,
        gender: Gender::Female,
    }
}

fn placement_bench(c: &mut Criterion) {
    let year = year_pillar(1985);
    let menh = Branch::Suu;
    let ctx = PlacementContext {
        hour: Branch::Ty,
        month: 12,
        day: 25,
        year,
        menh,
        cuc: cuc_for(year.stem, menh),
        direction: RingDirection::for_birth(Gender::Female, year.stem),
    };

    let mut group = c.benchmark_group("placement");
    group.bench_function("place_all", |b| b.iter(|| place_all(black_box(&ctx))));
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let record = record();
    let solar = BirthInput {
        full_name: "Bench".to_string(),
        birth_date: "1990-05-15".to_string(),
        birth_hour: "ngo".to_string(),
        gender: "male".to_string(),
        calendar_type: "solar".to_string(),
        is_leap_month: false,
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| b.iter(|| build_chart(black_box(&record))));
    group.bench_function("generate_chart_solar", |b| {
        b.iter(|| generate_chart(black_box(&solar)))
    });
    group.finish();
}

criterion_group!(benches, placement_bench, chart_bench);
criterion_main!(benches);
