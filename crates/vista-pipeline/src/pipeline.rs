//! The `Sim::run`-equivalent: the strict linear CD -> VT -> CR -> DS -> RK
//! sequence (§4.6), short-circuiting the moment a stage yields zero
//! survivors.

use vista_access::{score_access, RoadNetwork};
use vista_cluster::reduce_clusters;
use vista_core::{RoadSegment, TerrainCandidate, TerrainGrid, VisibilityRequest};
use vista_detect::detect_candidates;
use vista_rank::{rank_candidates, ScoredCandidate};
use vista_visibility::trace_all;

use crate::cancel::CancellationToken;
use crate::error::{PipelineError, PipelineResult, Stage};
use crate::observer::{NoopObserver, PipelineObserver};

/// Candidate counts surviving each stage, in pipeline order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub candidates_detected: usize,
    pub visibility_survivors: usize,
    pub cluster_survivors: usize,
    pub drivability_survivors: usize,
    pub final_results: usize,
}

/// The result of one `run_pipeline` call: the ranked candidates plus a
/// small status object (§6).
#[derive(Clone, Debug, Default)]
pub struct PipelineOutput {
    pub results: Vec<ScoredCandidate>,
    pub stage_counts: StageCounts,
    /// Set when the pipeline ran to completion but the named stage produced
    /// zero survivors (§7's `EmptyPipeline`). `results` is empty whenever
    /// this is `Some`.
    pub empty_stage: Option<Stage>,
}

impl PipelineOutput {
    fn empty(stage_counts: StageCounts, stage: Stage) -> Self {
        PipelineOutput {
            results: Vec::new(),
            stage_counts,
            empty_stage: Some(stage),
        }
    }
}

/// Run the full visibility analysis pipeline (§4.6) with no progress
/// observer and no cancellation support. This is the entry point described
/// in §6.
///
/// See [`run_pipeline_cancellable`] for a version with an observer hook and
/// cooperative cancellation.
pub fn run_pipeline(
    grid: &TerrainGrid,
    roads: &[RoadSegment],
    request: &VisibilityRequest,
) -> PipelineResult<PipelineOutput> {
    run_pipeline_cancellable(grid, roads, request, None, &mut NoopObserver)
}

/// Full pipeline entry point with an observer hook at every stage boundary
/// and an optional cooperative cancellation token (§5), checked once
/// between each stage.
pub fn run_pipeline_cancellable(
    grid: &TerrainGrid,
    roads: &[RoadSegment],
    request: &VisibilityRequest,
    cancel: Option<&CancellationToken>,
    observer: &mut dyn PipelineObserver,
) -> PipelineResult<PipelineOutput> {
    request.validate()?;
    check_cancelled(cancel)?;

    let mut counts = StageCounts::default();

    // ── Candidate Detector ──────────────────────────────────────────────
    observer.on_stage_start(Stage::Candidates);
    let candidates: Vec<TerrainCandidate> = detect_candidates(grid, request)?;
    counts.candidates_detected = candidates.len();
    observer.on_stage_complete(Stage::Candidates, candidates.len());
    if candidates.is_empty() {
        return Ok(PipelineOutput::empty(counts, Stage::Candidates));
    }
    check_cancelled(cancel)?;

    // ── Visibility Tracer ───────────────────────────────────────────────
    observer.on_stage_start(Stage::Visibility);
    let traced = trace_all(grid, &candidates, request);
    counts.visibility_survivors = traced.len();
    observer.on_stage_complete(Stage::Visibility, traced.len());
    if traced.is_empty() {
        return Ok(PipelineOutput::empty(counts, Stage::Visibility));
    }
    check_cancelled(cancel)?;

    // ── Cluster Reducer ─────────────────────────────────────────────────
    observer.on_stage_start(Stage::Cluster);
    let clustered = reduce_clusters(traced, request.cluster_grid_m);
    counts.cluster_survivors = clustered.len();
    observer.on_stage_complete(Stage::Cluster, clustered.len());
    if clustered.is_empty() {
        return Ok(PipelineOutput::empty(counts, Stage::Cluster));
    }
    check_cancelled(cancel)?;

    // ── Drivability Scorer ──────────────────────────────────────────────
    observer.on_stage_start(Stage::Drivability);
    let network = RoadNetwork::build(roads);
    let reachable = score_access(&network, clustered, request);
    counts.drivability_survivors = reachable.len();
    observer.on_stage_complete(Stage::Drivability, reachable.len());
    if reachable.is_empty() {
        return Ok(PipelineOutput::empty(counts, Stage::Drivability));
    }
    check_cancelled(cancel)?;

    // ── Composite Ranker ────────────────────────────────────────────────
    let results = rank_candidates(reachable, request);
    for sc in &results {
        if !sc.score.is_finite() {
            return Err(PipelineError::Internal(format!(
                "non-finite score {} for candidate (row={}, col={})",
                sc.score, sc.candidate.row, sc.candidate.col
            )));
        }
    }
    counts.final_results = results.len();

    let output = PipelineOutput {
        results,
        stage_counts: counts,
        empty_stage: None,
    };
    observer.on_pipeline_end(&output);
    Ok(output)
}

fn check_cancelled(cancel: Option<&CancellationToken>) -> PipelineResult<()> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(PipelineError::Cancelled),
        _ => Ok(()),
    }
}
