//! Benchmark records and their builder.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::trace;

use crate::template::{Invocation, TemplateVars};
use crate::{ArrayDecl, CatalogError, LoopDecl, MainId, PartitionType, Result, TripCount};

/// Immutable description of one benchmark.
///
/// Produced by [`BenchmarkBuilder::build`]; there is no way to mutate a
/// record once it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Benchmark {
    name: String,
    category: String,
    harness_path: String,
    kernels: Vec<String>,
    main_id: MainId,
    arrays: Vec<ArrayDecl>,
    loops: Vec<LoopDecl>,
    exec_cmd: String,
    run_args: String,
}

impl Benchmark {
    /// Unique benchmark name (e.g. "aes-aes").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grouping label, shared between benchmarks.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Driver source file, relative to the suite root.
    #[must_use]
    pub fn harness_path(&self) -> &str {
        &self.harness_path
    }

    /// Kernel functions in invocation order.
    #[must_use]
    pub fn kernels(&self) -> &[String] {
        &self.kernels
    }

    #[must_use]
    pub const fn main_id(&self) -> MainId {
        self.main_id
    }

    /// Arrays in declaration order.
    #[must_use]
    pub fn arrays(&self) -> &[ArrayDecl] {
        &self.arrays
    }

    /// Loops in declaration order.
    #[must_use]
    pub fn loops(&self) -> &[LoopDecl] {
        &self.loops
    }

    /// Simulation binary template (contains `%(source_dir)s`).
    #[must_use]
    pub fn exec_cmd(&self) -> &str {
        &self.exec_cmd
    }

    /// Argument template listing input and check data files.
    #[must_use]
    pub fn run_args(&self) -> &str {
        &self.run_args
    }

    /// Find an array by its (possibly qualified) name.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArrayDecl> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Loops declared inside `function`, in declaration order.
    pub fn loops_in<'a>(&'a self, function: &'a str) -> impl Iterator<Item = &'a LoopDecl> + 'a {
        self.loops.iter().filter(move |l| l.function == function)
    }

    /// Sum of all array footprints in bytes.
    #[must_use]
    pub fn total_array_bytes(&self) -> u64 {
        self.arrays.iter().map(ArrayDecl::total_bytes).sum()
    }

    /// Resolve the command line for a checkout rooted at `source_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either template is malformed or references a
    /// placeholder other than `source_dir`.
    pub fn invocation(&self, source_dir: &Path) -> Result<Invocation> {
        self.invocation_with(&TemplateVars::with_source_dir(source_dir))
    }

    /// Resolve the command line with an explicit set of template variables.
    ///
    /// # Errors
    ///
    /// Returns an error if either template is malformed or references an
    /// unbound placeholder.
    pub fn invocation_with(&self, vars: &TemplateVars) -> Result<Invocation> {
        Invocation::expand(&self.exec_cmd, &self.run_args, vars)
    }
}

/// Mutable builder for a [`Benchmark`].
///
/// Adders validate their input immediately; a rejected call leaves the
/// builder untouched. Setters overwrite any earlier value.
#[derive(Debug, Clone)]
pub struct BenchmarkBuilder {
    name: String,
    category: String,
    harness_path: String,
    kernels: Vec<String>,
    main_id: Option<MainId>,
    arrays: Vec<ArrayDecl>,
    loops: Vec<LoopDecl>,
    exec_cmd: Option<String>,
    run_args: Option<String>,
    array_names: FxHashSet<String>,
    loop_keys: FxHashSet<(String, String)>,
}

impl BenchmarkBuilder {
    /// Start a benchmark declaration.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        harness_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            harness_path: harness_path.into(),
            kernels: Vec::new(),
            main_id: None,
            arrays: Vec::new(),
            loops: Vec::new(),
            exec_cmd: None,
            run_args: None,
            array_names: FxHashSet::default(),
            loop_keys: FxHashSet::default(),
        }
    }

    /// Name of the benchmark being declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the kernel functions (replaces any previous list).
    pub fn set_kernels<I, S>(&mut self, kernels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kernels = kernels.into_iter().map(Into::into).collect();
    }

    pub const fn set_main_id(&mut self, id: u32) {
        self.main_id = Some(MainId(id));
    }

    pub fn set_exec_cmd(&mut self, cmd: impl Into<String>) {
        self.exec_cmd = Some(cmd.into());
    }

    pub fn set_run_args(&mut self, args: impl Into<String>) {
        self.run_args = Some(args.into());
    }

    /// Append an array declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already declared in this benchmark or
    /// if `size` or `word_size` is zero.
    pub fn add_array(
        &mut self,
        name: impl Into<String>,
        size: u32,
        word_size: u32,
        partition: PartitionType,
    ) -> Result<()> {
        let name = name.into();
        if self.array_names.contains(&name) {
            return Err(CatalogError::DuplicateArray {
                benchmark: self.name.clone(),
                array: name,
            });
        }
        if size == 0 {
            return Err(CatalogError::InvalidArraySize {
                benchmark: self.name.clone(),
                array: name,
            });
        }
        if word_size == 0 {
            return Err(CatalogError::InvalidWordSize {
                benchmark: self.name.clone(),
                array: name,
            });
        }

        trace!(benchmark = %self.name, array = %name, size, word_size, %partition, "array");
        self.array_names.insert(name.clone());
        self.arrays.push(ArrayDecl {
            name,
            size,
            word_size,
            partition,
        });
        Ok(())
    }

    /// Append a loop declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if `(function, label)` is already declared in this
    /// benchmark or if the trip count is zero.
    pub fn add_loop(
        &mut self,
        function: impl Into<String>,
        label: impl Into<String>,
        trip_count: TripCount,
    ) -> Result<()> {
        let function = function.into();
        let label = label.into();

        let key = (function, label);
        if self.loop_keys.contains(&key) {
            let (function, label) = key;
            return Err(CatalogError::DuplicateLoop {
                benchmark: self.name.clone(),
                function,
                label,
            });
        }
        if !trip_count.is_valid() {
            let (function, label) = key;
            return Err(CatalogError::InvalidTripCount {
                benchmark: self.name.clone(),
                function,
                label,
                value: trip_count.to_string(),
            });
        }

        let (function, label) = key.clone();
        trace!(benchmark = %self.name, %function, %label, %trip_count, "loop");
        self.loop_keys.insert(key);
        self.loops.push(LoopDecl {
            function,
            label,
            trip_count,
        });
        Ok(())
    }

    /// Freeze the declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, or if kernels, main id, exec
    /// command or run arguments were never set.
    pub fn build(self) -> Result<Benchmark> {
        if self.name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let missing = |field| CatalogError::MissingField {
            benchmark: self.name.clone(),
            field,
        };
        if self.kernels.is_empty() {
            return Err(missing("kernels"));
        }
        let main_id = self.main_id.ok_or_else(|| missing("main_id"))?;
        let exec_cmd = self.exec_cmd.ok_or_else(|| missing("exec_cmd"))?;
        let run_args = self.run_args.ok_or_else(|| missing("run_args"))?;

        Ok(Benchmark {
            name: self.name,
            category: self.category,
            harness_path: self.harness_path,
            kernels: self.kernels,
            main_id,
            arrays: self.arrays,
            loops: self.loops,
            exec_cmd,
            run_args,
        })
    }
}
