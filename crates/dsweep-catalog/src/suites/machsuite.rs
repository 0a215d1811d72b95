//! MachSuite benchmark definitions.
//!
//! Simulation binaries and data files live under the suite checkout:
//! `{source_dir}/{kernel}/{variant}/{name}-gem5-accel`.

use crate::TripCount::Exact;
use crate::{
    Benchmark, BenchmarkBuilder, BenchmarkCatalog, PARTITION_BLOCK, PARTITION_COMPLETE,
    PARTITION_CYCLIC, Result, UNROLL_FLATTEN, UNROLL_ONE,
};

/// Suite label used by the sweep tooling.
pub const MACHSUITE_NAME: &str = "MACHSUITE";

const HARNESS: &str = "common/harness.c";

/// Build the MachSuite catalog.
///
/// Registration order is the sweep order, not alphabetical.
///
/// # Errors
///
/// Returns an error only if a declaration below violates a catalog invariant.
pub fn machsuite() -> Result<BenchmarkCatalog> {
    let mut catalog = BenchmarkCatalog::new(MACHSUITE_NAME);
    for benchmark in [
        bfs_bulk(),
        sort_merge(),
        spmv_ellpack(),
        bfs_queue(),
        stencil_stencil3d(),
        sort_radix(),
        kmp_kmp(),
        nw_nw(),
        md_grid(),
        fft_strided(),
        aes_aes(),
        md_knn(),
        fft_transpose(),
        gemm_blocked(),
        stencil_stencil2d(),
        spmv_crs(),
        gemm_ncubed(),
        viterbi_viterbi(),
    ] {
        catalog.register(benchmark?)?;
    }
    Ok(catalog)
}

fn aes_aes() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("aes-aes", "aes", HARNESS);
    b.set_kernels(["aes256_encrypt_ecb"]);
    b.set_main_id(0x10);
    b.add_array("ctx", 96, 1, PARTITION_CYCLIC)?;
    b.add_array("k", 32, 1, PARTITION_CYCLIC)?;
    b.add_array("buf", 16, 1, PARTITION_CYCLIC)?;
    b.add_array("rcon", 1, 1, PARTITION_COMPLETE)?;
    b.add_array("sbox", 256, 1, PARTITION_CYCLIC)?;
    b.add_loop("aes_addRoundKey_cpy", "cpkey", Exact(16))?;
    b.add_loop("aes_subBytes", "sub", Exact(16))?;
    b.add_loop("aes_addRoundKey", "addkey", Exact(16))?;
    b.add_loop("aes256_encrypt_ecb", "ecb1", Exact(32))?;
    b.add_loop("aes256_encrypt_ecb", "ecb2", Exact(8))?;
    b.add_loop("aes256_encrypt_ecb", "ecb3", Exact(13))?;
    b.set_exec_cmd("%(source_dir)s/aes/aes/aes-aes-gem5-accel");
    b.set_run_args("%(source_dir)s/aes/aes/input.data %(source_dir)s/aes/aes/check.data");
    b.build()
}

fn bfs_bulk() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("bfs-bulk", "bulk", HARNESS);
    b.set_kernels(["bfs"]);
    b.set_main_id(0x30);
    b.add_array("nodes", 512, 8, PARTITION_CYCLIC)?;
    b.add_array("edges", 4096, 8, PARTITION_CYCLIC)?;
    b.add_array("level", 256, 1, PARTITION_CYCLIC)?;
    b.add_array("level_counts", 10, 8, PARTITION_CYCLIC)?;
    b.add_loop("bfs", "loop_horizons", UNROLL_ONE)?;
    b.add_loop("bfs", "loop_nodes", Exact(256))?;
    b.add_loop("bfs", "loop_neighbors", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/bfs/bulk/bfs-bulk-gem5-accel");
    b.set_run_args("%(source_dir)s/bfs/bulk/input.data %(source_dir)s/bfs/bulk/check.data");
    b.build()
}

fn bfs_queue() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("bfs-queue", "queue", HARNESS);
    b.set_kernels(["bfs"]);
    b.set_main_id(0x40);
    b.add_array("queue", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("nodes", 512, 8, PARTITION_CYCLIC)?;
    b.add_array("edges", 4096, 8, PARTITION_CYCLIC)?;
    b.add_array("level", 256, 1, PARTITION_CYCLIC)?;
    b.add_array("level_counts", 10, 8, PARTITION_CYCLIC)?;
    b.add_loop("bfs", "loop_queue", Exact(10))?;
    b.add_loop("bfs", "loop_neighbors", UNROLL_ONE)?;
    b.set_exec_cmd("%(source_dir)s/bfs/queue/bfs-queue-gem5-accel");
    b.set_run_args("%(source_dir)s/bfs/queue/input.data %(source_dir)s/bfs/queue/check.data");
    b.build()
}

fn fft_strided() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("fft-strided", "fft", HARNESS);
    b.set_kernels(["fft"]);
    b.set_main_id(0x50);
    b.add_array("real", 1024, 8, PARTITION_CYCLIC)?;
    b.add_array("img", 1024, 8, PARTITION_CYCLIC)?;
    b.add_array("real_twid", 1024, 8, PARTITION_CYCLIC)?;
    b.add_array("img_twid", 1024, 8, PARTITION_CYCLIC)?;
    b.add_loop("fft", "outer", Exact(512))?;
    b.add_loop("fft", "inner", Exact(1))?;
    b.set_exec_cmd("%(source_dir)s/fft/strided/fft-strided-gem5-accel");
    b.set_run_args("%(source_dir)s/fft/strided/input.data %(source_dir)s/fft/strided/check.data");
    b.build()
}

fn fft_transpose() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("fft-transpose", "fft", HARNESS);
    b.set_kernels(["fft1D_512"]);
    b.set_main_id(0x60);
    b.add_array("fft1D_512.reversed", 8, 4, PARTITION_COMPLETE)?;
    b.add_array("DATA_x", 512, 8, PARTITION_CYCLIC)?;
    b.add_array("DATA_y", 512, 8, PARTITION_CYCLIC)?;
    b.add_array("data_x", 8, 8, PARTITION_COMPLETE)?;
    b.add_array("data_y", 8, 8, PARTITION_COMPLETE)?;
    b.add_array("smem", 576, 8, PARTITION_CYCLIC)?;
    b.add_array("work_x", 512, 8, PARTITION_CYCLIC)?;
    b.add_array("work_y", 512, 8, PARTITION_CYCLIC)?;
    b.add_loop("fft1D_512", "loop1", Exact(64))?;
    b.add_loop("fft1D_512", "loop2", Exact(64))?;
    b.add_loop("fft1D_512", "loop3", Exact(64))?;
    b.add_loop("fft1D_512", "loop4", Exact(64))?;
    b.add_loop("fft1D_512", "loop5", Exact(64))?;
    b.add_loop("fft1D_512", "loop6", Exact(64))?;
    b.add_loop("fft1D_512", "loop7", Exact(64))?;
    b.add_loop("fft1D_512", "loop8", Exact(64))?;
    b.add_loop("fft1D_512", "loop9", Exact(64))?;
    b.add_loop("fft1D_512", "loop10", Exact(64))?;
    b.add_loop("fft1D_512", "loop11", Exact(64))?;
    b.add_loop("fft1D_512", "twiddles", Exact(8))?;
    b.set_exec_cmd("%(source_dir)s/fft/transpose/fft-transpose-gem5-accel");
    b.set_run_args("%(source_dir)s/fft/transpose/input.data %(source_dir)s/fft/transpose/check.data");
    b.build()
}

fn gemm_blocked() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("gemm-blocked", "bbgemm", HARNESS);
    b.set_kernels(["bbgemm"]);
    b.set_main_id(0x70);
    b.add_array("m1", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("m2", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("prod", 4096, 4, PARTITION_CYCLIC)?;
    b.add_loop("bbgemm", "loopjj", UNROLL_ONE)?;
    b.add_loop("bbgemm", "loopkk", UNROLL_ONE)?;
    b.add_loop("bbgemm", "loopi", Exact(64))?;
    b.add_loop("bbgemm", "loopk", UNROLL_FLATTEN)?;
    b.add_loop("bbgemm", "loopj", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/gemm/blocked/gemm-blocked-gem5-accel");
    b.set_run_args("%(source_dir)s/gemm/blocked/input.data %(source_dir)s/gemm/blocked/check.data");
    b.build()
}

fn gemm_ncubed() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("gemm-ncubed", "gemm", HARNESS);
    b.set_kernels(["gemm"]);
    b.set_main_id(0x80);
    b.add_array("m1", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("m2", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("prod", 4096, 4, PARTITION_CYCLIC)?;
    b.add_loop("gemm", "outer", UNROLL_ONE)?;
    b.add_loop("gemm", "middle", Exact(64))?;
    b.add_loop("gemm", "inner", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/gemm/ncubed/gemm-ncubed-gem5-accel");
    b.set_run_args("%(source_dir)s/gemm/ncubed/input.data %(source_dir)s/gemm/ncubed/check.data");
    b.build()
}

fn kmp_kmp() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("kmp-kmp", "kmp", HARNESS);
    b.set_kernels(["kmp"]);
    b.set_main_id(0x90);
    b.add_array("pattern", 4, 1, PARTITION_COMPLETE)?;
    b.add_array("input", 32411, 1, PARTITION_CYCLIC)?;
    b.add_array("kmpNext", 4, 4, PARTITION_COMPLETE)?;
    b.add_loop("CPF", "c1", Exact(4))?;
    b.add_loop("CPF", "c2", UNROLL_ONE)?;
    b.add_loop("kmp", "k1", Exact(32411))?;
    b.add_loop("kmp", "k2", UNROLL_ONE)?;
    b.set_exec_cmd("%(source_dir)s/kmp/kmp/kmp-kmp-gem5-accel");
    b.set_run_args("%(source_dir)s/kmp/kmp/input.data %(source_dir)s/kmp/kmp/check.data");
    b.build()
}

fn md_grid() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("md-grid", "md", HARNESS);
    b.set_kernels(["md"]);
    b.set_main_id(0xA0);
    b.add_array("n_points", 64, 4, PARTITION_CYCLIC)?;
    b.add_array("d_force", 1920, 8, PARTITION_CYCLIC)?;
    b.add_array("position", 1920, 8, PARTITION_CYCLIC)?;
    b.add_loop("md", "loop_grid0_x", UNROLL_ONE)?;
    b.add_loop("md", "loop_grid0_y", UNROLL_ONE)?;
    b.add_loop("md", "loop_grid0_z", UNROLL_ONE)?;
    b.add_loop("md", "loop_grid1_x", UNROLL_ONE)?;
    b.add_loop("md", "loop_grid1_y", UNROLL_ONE)?;
    b.add_loop("md", "loop_grid1_z", UNROLL_ONE)?;
    b.add_loop("md", "loop_p", UNROLL_FLATTEN)?;
    b.add_loop("md", "loop_q", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/md/grid/md-grid-gem5-accel");
    b.set_run_args("%(source_dir)s/md/grid/input.data %(source_dir)s/md/grid/check.data");
    b.build()
}

fn md_knn() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("md-knn", "md", HARNESS);
    b.set_kernels(["md_kernel"]);
    b.set_main_id(0xB0);
    b.add_array("d_force_x", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("d_force_y", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("d_force_z", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("position_x", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("position_y", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("position_z", 256, 8, PARTITION_CYCLIC)?;
    b.add_array("NL", 4096, 8, PARTITION_CYCLIC)?;
    b.add_loop("md_kernel", "loop_i", Exact(256))?;
    b.add_loop("md_kernel", "loop_j", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/md/knn/md-knn-gem5-accel");
    b.set_run_args("%(source_dir)s/md/knn/input.data %(source_dir)s/md/knn/check.data");
    b.build()
}

fn nw_nw() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("nw-nw", "needwun", HARNESS);
    b.set_kernels(["needwun"]);
    b.set_main_id(0xC0);
    b.add_array("SEQA", 128, 1, PARTITION_CYCLIC)?;
    b.add_array("SEQB", 128, 1, PARTITION_CYCLIC)?;
    b.add_array("alignedA", 256, 1, PARTITION_CYCLIC)?;
    b.add_array("alignedB", 256, 1, PARTITION_CYCLIC)?;
    b.add_array("A", 16641, 4, PARTITION_CYCLIC)?;
    b.add_array("ptr", 16641, 1, PARTITION_CYCLIC)?;
    b.add_loop("needwun", "init_row", Exact(129))?;
    b.add_loop("needwun", "init_col", Exact(129))?;
    b.add_loop("needwun", "fill_out", Exact(128))?;
    b.add_loop("needwun", "fill_in", UNROLL_FLATTEN)?;
    b.add_loop("needwun", "trace", UNROLL_ONE)?;
    b.add_loop("needwun", "pad_a", UNROLL_ONE)?;
    b.add_loop("needwun", "pad_b", UNROLL_ONE)?;
    b.set_exec_cmd("%(source_dir)s/nw/nw/nw-nw-gem5-accel");
    b.set_run_args("%(source_dir)s/nw/nw/input.data %(source_dir)s/nw/nw/check.data");
    b.build()
}

fn sort_merge() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("sort-merge", "merge", HARNESS);
    b.set_kernels(["mergesort"]);
    b.set_main_id(0xD0);
    b.add_array("temp", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("a", 4096, 4, PARTITION_CYCLIC)?;
    b.add_loop("merge", "merge_label1", Exact(2048))?;
    b.add_loop("merge", "merge_label2", Exact(2048))?;
    b.add_loop("merge", "merge_label3", Exact(1))?;
    b.add_loop("ms_mergesort", "mergesort_label1", UNROLL_ONE)?;
    b.add_loop("ms_mergesort", "mergesort_label2", UNROLL_ONE)?;
    b.set_exec_cmd("%(source_dir)s/sort/merge/sort-merge-gem5-accel");
    b.set_run_args("%(source_dir)s/sort/merge/input.data %(source_dir)s/sort/merge/check.data");
    b.build()
}

fn sort_radix() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("sort-radix", "radix", HARNESS);
    b.set_kernels(["ss_sort"]);
    b.set_main_id(0xE0);
    b.add_array("a", 2048, 4, PARTITION_CYCLIC)?;
    b.add_array("b", 2048, 4, PARTITION_CYCLIC)?;
    b.add_array("bucket", 2048, 4, PARTITION_CYCLIC)?;
    b.add_array("sum", 128, 4, PARTITION_CYCLIC)?;
    b.add_loop("last_step_scan", "last_1", Exact(128))?;
    b.add_loop("last_step_scan", "last_2", UNROLL_FLATTEN)?;
    b.add_loop("local_scan", "local_1", Exact(128))?;
    b.add_loop("local_scan", "local_2", UNROLL_FLATTEN)?;
    b.add_loop("sum_scan", "sum_1", Exact(128))?;
    b.add_loop("hist", "hist_1", Exact(512))?;
    b.add_loop("hist", "hist_2", UNROLL_FLATTEN)?;
    b.add_loop("update", "update_1", Exact(512))?;
    b.add_loop("update", "update_2", UNROLL_FLATTEN)?;
    b.add_loop("init", "init_1", Exact(2048))?;
    b.add_loop("ss_sort", "sort_1", UNROLL_ONE)?;
    b.set_exec_cmd("%(source_dir)s/sort/radix/sort-radix-gem5-accel");
    b.set_run_args("%(source_dir)s/sort/radix/input.data %(source_dir)s/sort/radix/check.data");
    b.build()
}

fn spmv_crs() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("spmv-crs", "crs", HARNESS);
    b.set_kernels(["spmv"]);
    b.set_main_id(0xF0);
    b.add_array("val", 1666, 8, PARTITION_CYCLIC)?;
    b.add_array("cols", 1666, 4, PARTITION_CYCLIC)?;
    b.add_array("rowDelimiters", 495, 4, PARTITION_CYCLIC)?;
    b.add_array("vec", 494, 8, PARTITION_CYCLIC)?;
    b.add_array("out", 494, 8, PARTITION_CYCLIC)?;
    b.add_loop("spmv", "spmv_1", Exact(494))?;
    b.add_loop("spmv", "spmv_2", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/spmv/crs/spmv-crs-gem5-accel");
    b.set_run_args("%(source_dir)s/spmv/crs/input.data %(source_dir)s/spmv/crs/check.data");
    b.build()
}

fn spmv_ellpack() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("spmv-ellpack", "ellpack", HARNESS);
    b.set_kernels(["ellpack"]);
    b.set_main_id(0x100);
    b.add_array("nzval", 4940, 8, PARTITION_CYCLIC)?;
    b.add_array("cols", 4940, 4, PARTITION_CYCLIC)?;
    b.add_array("vec", 494, 8, PARTITION_CYCLIC)?;
    b.add_array("out", 494, 8, PARTITION_CYCLIC)?;
    b.add_loop("ellpack", "ellpack_1", Exact(494))?;
    b.add_loop("ellpack", "ellpack_2", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/spmv/ellpack/spmv-ellpack-gem5-accel");
    b.set_run_args("%(source_dir)s/spmv/ellpack/input.data %(source_dir)s/spmv/ellpack/check.data");
    b.build()
}

fn stencil_stencil2d() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("stencil-stencil2d", "stencil", HARNESS);
    b.set_kernels(["stencil"]);
    b.set_main_id(0x110);
    b.add_array("orig", 8580, 4, PARTITION_CYCLIC)?;
    b.add_array("sol", 8580, 4, PARTITION_CYCLIC)?;
    b.add_array("filter", 9, 4, PARTITION_COMPLETE)?;
    b.add_loop("stencil", "stencil_label1", UNROLL_ONE)?;
    b.add_loop("stencil", "stencil_label2", Exact(64))?;
    b.add_loop("stencil", "stencil_label3", UNROLL_FLATTEN)?;
    b.add_loop("stencil", "stencil_label4", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/stencil/stencil2d/stencil-stencil2d-gem5-accel");
    b.set_run_args("%(source_dir)s/stencil/stencil2d/input.data %(source_dir)s/stencil/stencil2d/check.data");
    b.build()
}

fn stencil_stencil3d() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("stencil-stencil3d", "stencil3d", HARNESS);
    b.set_kernels(["stencil3d"]);
    b.set_main_id(0x120);
    b.add_array("orig", 16384, 4, PARTITION_CYCLIC)?;
    b.add_array("sol", 16384, 4, PARTITION_CYCLIC)?;
    b.add_loop("stencil3d", "height_bound_col", UNROLL_ONE)?;
    b.add_loop("stencil3d", "height_bound_row", UNROLL_FLATTEN)?;
    b.add_loop("stencil3d", "col_bound_height", UNROLL_ONE)?;
    b.add_loop("stencil3d", "col_bound_row", UNROLL_FLATTEN)?;
    b.add_loop("stencil3d", "row_bound_height", UNROLL_ONE)?;
    b.add_loop("stencil3d", "row_bound_col", UNROLL_FLATTEN)?;
    b.add_loop("stencil3d", "loop_height", UNROLL_ONE)?;
    b.add_loop("stencil3d", "loop_col", Exact(30))?;
    b.add_loop("stencil3d", "loop_row", UNROLL_FLATTEN)?;
    b.set_exec_cmd("%(source_dir)s/stencil/stencil3d/stencil-stencil3d-gem5-accel");
    b.set_run_args("%(source_dir)s/stencil/stencil3d/input.data %(source_dir)s/stencil/stencil3d/check.data");
    b.build()
}

fn viterbi_viterbi() -> Result<Benchmark> {
    let mut b = BenchmarkBuilder::new("viterbi-viterbi", "viterbi", HARNESS);
    b.set_kernels(["viterbi"]);
    b.set_main_id(0x130);
    b.add_array("Obs", 128, 4, PARTITION_CYCLIC)?;
    b.add_array("transMat", 4096, 4, PARTITION_CYCLIC)?;
    b.add_array("obsLik", 4096, 4, PARTITION_BLOCK)?;
    b.add_array("v", 4096, 4, PARTITION_BLOCK)?;
    b.add_loop("viterbi", "L_init", Exact(1))?;
    b.add_loop("viterbi", "L_timestep", Exact(1))?;
    b.add_loop("viterbi", "L_curr_state", Exact(32))?;
    // Written as a literal trip count of 0 in the legacy sweep table. Zero is
    // not a valid count, so it is declared as a full unroll.
    b.add_loop("viterbi", "L_prev_state", UNROLL_FLATTEN)?;
    b.add_loop("viterbi", "L_end", Exact(1))?;
    b.set_exec_cmd("%(source_dir)s/viterbi/viterbi/viterbi-viterbi-gem5-accel");
    b.set_run_args("%(source_dir)s/viterbi/viterbi/input.data %(source_dir)s/viterbi/viterbi/check.data");
    b.build()
}
