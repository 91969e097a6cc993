//! Table assembly: one isotherm query per temperature, fetched on a worker
//! pool and appended in temperature order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use ft_webbook::{Component, IsothermQuery, IsothermResponse, IsothermSource};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::TableConfig;
use crate::error::{TableError, TableResult};
use crate::grid::PressureSweep;
use crate::normalize::normalize_units;
use crate::phase::remove_phase_boundaries;
use crate::progress::{GenerationProgressEvent, GenerationStage, IsothermProgress};
use crate::table::{OutputTable, PropertyRow};

type ProgressCallback<'a> = &'a (dyn Fn(GenerationProgressEvent) + Sync);

fn emit_progress(
    progress_cb: Option<ProgressCallback<'_>>,
    stage: GenerationStage,
    started: Instant,
    message: Option<String>,
    isotherm: Option<IsothermProgress>,
) {
    if let Some(cb) = progress_cb {
        cb(GenerationProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            isotherm,
        });
    }
}

/// Generate the full table for `config`, fetching isotherms from `source`.
pub fn generate_table(
    config: &TableConfig,
    workers: usize,
    source: &dyn IsothermSource,
) -> TableResult<OutputTable> {
    generate_table_with_progress(config, workers, source, None)
}

/// Generate the full table and stream progress events.
///
/// Configuration errors are reported before any request is made. The first
/// failing isotherm aborts the run: no further isotherms are scheduled and no
/// partial table is produced.
pub fn generate_table_with_progress(
    config: &TableConfig,
    workers: usize,
    source: &dyn IsothermSource,
    progress_cb: Option<ProgressCallback<'_>>,
) -> TableResult<OutputTable> {
    let started = Instant::now();

    emit_progress(
        progress_cb,
        GenerationStage::ValidatingConfig,
        started,
        Some("Validating configuration".to_string()),
        None,
    );
    let validated = config.validate()?;
    let component = validated.component;
    let temperatures = validated.grid.temperature_points();
    let total = temperatures.len();
    let workers = workers.max(1);

    info!(
        component = %component,
        grid = %validated.grid,
        workers,
        source = source.name(),
        "generating property table"
    );

    emit_progress(
        progress_cb,
        GenerationStage::QueryingIsotherms,
        started,
        Some(format!("Querying {} isotherms", total)),
        Some(IsothermProgress {
            completed: 0,
            total,
            ..IsothermProgress::default()
        }),
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| TableError::WorkerPool(e.to_string()))?;

    let completed = AtomicUsize::new(0);
    let sweep = &validated.grid.pressures;

    // Collecting into a Result stops scheduling isotherms after the first error
    let isotherms: Vec<Vec<PropertyRow>> = pool.install(|| {
        temperatures
            .par_iter()
            .map(|&temperature_c| {
                let result = process_isotherm(source, component, sweep, temperature_c);
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                emit_progress(
                    progress_cb,
                    GenerationStage::QueryingIsotherms,
                    started,
                    None,
                    Some(IsothermProgress {
                        completed: done,
                        total,
                        temperature_c,
                        rows: result.as_ref().map(|rows| rows.len()).unwrap_or(0),
                    }),
                );
                result
            })
            .collect::<TableResult<Vec<_>>>()
    })?;

    // Aggregate in temperature order
    let mut table = OutputTable::new(component, validated.grid.clone());
    for rows in isotherms {
        table.extend_isotherm(rows);
    }

    info!(
        rows = table.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "property table complete"
    );
    emit_progress(
        progress_cb,
        GenerationStage::Completed,
        started,
        Some(format!("{} rows", table.len())),
        None,
    );

    Ok(table)
}

/// Query, parse, filter and normalize a single isotherm.
///
/// Every row carries `temperature_c` as requested, not the temperature echoed
/// by the service.
pub fn process_isotherm(
    source: &dyn IsothermSource,
    component: Component,
    sweep: &PressureSweep,
    temperature_c: f64,
) -> TableResult<Vec<PropertyRow>> {
    let query = IsothermQuery::new(
        component,
        temperature_c,
        sweep.min_pa,
        sweep.max_pa,
        sweep.increment(),
    );

    let body = source
        .fetch(&query)
        .map_err(|e| TableError::at_isotherm(e, temperature_c))?;
    let response =
        IsothermResponse::parse(&body).map_err(|e| TableError::at_isotherm(e, temperature_c))?;
    let raw_len = response.len();

    let (mut response, removed) = remove_phase_boundaries(response);
    if removed > 0 {
        warn!(
            temperature_c,
            removed, "dropped phase-boundary samples from isotherm"
        );
    }
    normalize_units(&mut response);

    debug!(
        temperature_c,
        raw_len,
        kept = response.len(),
        "isotherm processed"
    );

    let rows = (0..response.len())
        .map(|i| PropertyRow {
            temperature_c,
            pressure_pa: response.pressure[i],
            density_kg_m3: response.density[i],
            viscosity_pa_s: response.viscosity[i],
            enthalpy_j_per_kg: response.enthalpy[i],
        })
        .collect();

    Ok(rows)
}
