//! Performance benchmarks for route-blocker
//!
//! Run with: cargo bench --package route-blocker

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use route_blocker::{Config, RouteSegmenter, Waypoint, create_route_blocker, geodesy};

/// Generate a wavy route with the specified number of waypoints.
fn generate_route(num_points: usize, base_lat: f64, base_lon: f64) -> Vec<Waypoint> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            let lat = base_lat + t * 0.1 + (t * 50.0).sin() * 0.001;
            let lon = base_lon + t * 0.1 + (t * 30.0).cos() * 0.001;
            Waypoint::new(lat, lon)
        })
        .collect()
}

/// Generate multiple routes spread across an area
fn generate_multiple_routes(num_routes: usize, points_per_route: usize) -> Vec<Vec<Waypoint>> {
    (0..num_routes)
        .map(|i| {
            let lat_offset = (i % 10) as f64 * 0.1;
            let lon_offset = (i / 10) as f64 * 0.1;
            generate_route(points_per_route, 51.5 + lat_offset, -0.1 + lon_offset)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let a = Waypoint::new(51.5074, -0.1278);
    let b = Waypoint::new(48.8566, 2.3522);
    c.bench_function("vertical_distance", |bench| {
        bench.iter(|| geodesy::vertical_distance(black_box(&a), black_box(&b)));
    });
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for &num_points in &[1_000usize, 50_000] {
        let route = generate_route(num_points, 51.5, -0.1);
        group.throughput(Throughput::Elements(num_points as u64));

        for &resolution in &[10.0f64, 500.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("resolution_{resolution}m"), num_points),
                &route,
                |bench, route| {
                    bench.iter(|| create_route_blocker(route, resolution, 100.0));
                },
            );
        }
    }

    group.finish();
}

fn bench_many_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_routes");
    group.sample_size(20);

    // 100 routes with 1000 points each
    let routes = generate_multiple_routes(100, 1_000);
    let segmenter = RouteSegmenter::new(Config::new(100.0, 50.0));

    group.throughput(Throughput::Elements(100 * 1_000));
    group.bench_function("parallel_100_routes_1k_each", |bench| {
        bench.iter(|| segmenter.segment_many(&routes));
    });
    group.bench_function("sequential_100_routes_1k_each", |bench| {
        bench.iter(|| {
            routes
                .iter()
                .map(|route| segmenter.segment(route))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_segmentation, bench_many_routes);
criterion_main!(benches);
