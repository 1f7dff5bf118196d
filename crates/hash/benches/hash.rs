// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest::Digest;
use hashkit_hash::{Algorithm, Blake2b, Md5, Ripemd160, Whirlpool};
use rand::{thread_rng, RngCore};

const N: usize = 1 << 16;

fn random_data() -> Vec<u8> {
	let mut data = vec![0u8; N];
	thread_rng().fill_bytes(&mut data);
	data
}

fn bench_all_algorithms(c: &mut Criterion) {
	let mut group = c.benchmark_group("streaming");
	let data = random_data();

	group.throughput(Throughput::Bytes(N as u64));
	for algorithm in Algorithm::ALL {
		group.bench_with_input(BenchmarkId::from_parameter(algorithm), &data, |bench, data| {
			bench.iter(|| algorithm.digest(data))
		});
	}

	group.finish()
}

fn bench_vs_reference(c: &mut Criterion) {
	let mut group = c.benchmark_group("reference");
	let data = random_data();

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("MD5", |bench| bench.iter(|| <Md5 as Digest>::digest(&data)));
	group.bench_function("MD5-RustCrypto", |bench| {
		bench.iter(|| md5_crypto::Md5::digest(&data))
	});
	group.bench_function("RIPEMD-160", |bench| {
		bench.iter(|| <Ripemd160 as Digest>::digest(&data))
	});
	group.bench_function("RIPEMD-160-RustCrypto", |bench| {
		bench.iter(|| ripemd_crypto::Ripemd160::digest(&data))
	});
	group.bench_function("BLAKE2b-512", |bench| bench.iter(|| <Blake2b as Digest>::digest(&data)));
	group.bench_function("BLAKE2b-512-RustCrypto", |bench| {
		bench.iter(|| blake2_crypto::Blake2b512::digest(&data))
	});
	group.bench_function("Whirlpool", |bench| {
		bench.iter(|| <Whirlpool as Digest>::digest(&data))
	});
	group.bench_function("Whirlpool-RustCrypto", |bench| {
		bench.iter(|| whirlpool_crypto::Whirlpool::digest(&data))
	});

	group.finish()
}

criterion_group!(hash, bench_all_algorithms, bench_vs_reference);
criterion_main!(hash);
