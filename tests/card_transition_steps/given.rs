//! Given steps for card transition BDD scenarios.

use std::sync::Arc;

use super::world::{BoardWorld, card_id, list, pipeline_id, stage_id};
use eyre::WrapErr;
use pipeboard::board::{
    domain::{Card, CardParams, FilterCriteria, Priority, PriorityFilter},
    ports::CardStore,
    services::{BoardConfig, BoardSession, RegisterPipelineRequest},
};
use rstest_bdd_macros::given;

#[given(r#"a pipeline "{pipeline}" with stages "{stages}""#)]
fn pipeline_with_stages(
    world: &mut BoardWorld,
    pipeline: String,
    stages: String,
) -> Result<(), eyre::Report> {
    let request = RegisterPipelineRequest::new(pipeline.clone(), pipeline.clone())
        .with_sequential_stages(list(&stages).into_iter().map(|stage| (stage.clone(), stage)));
    world
        .service
        .register(request)
        .wrap_err_with(|| format!("register pipeline {pipeline}"))?;
    Ok(())
}

#[given(
    r#"a card "{card}" titled "{title}" in stage "{stage}" of pipeline "{pipeline}" with priority "{priority}""#
)]
fn card_in_stage(
    world: &mut BoardWorld,
    card: String,
    title: String,
    stage: String,
    pipeline: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let priority = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let params = CardParams::new(
        card_id(&card)?,
        pipeline_id(&pipeline)?,
        stage_id(&stage)?,
        title,
    )
    .with_priority(priority);
    let built = Card::new(params).wrap_err("build scenario card")?;
    world
        .cards
        .put(built)
        .wrap_err_with(|| format!("put card {card}"))?;
    Ok(())
}

#[given(r#"the board shows pipeline "{pipeline}""#)]
fn board_shows_pipeline(world: &mut BoardWorld, pipeline: String) -> Result<(), eyre::Report> {
    let mut session = BoardSession::new(
        world.service.clone(),
        Arc::clone(&world.engine),
        BoardConfig::default(),
    );
    session
        .switch_to(&pipeline_id(&pipeline)?)
        .wrap_err("open scenario board")?;
    world.session = Some(session);
    Ok(())
}

#[given(r#"the filter only admits priority "{priority}""#)]
fn filter_only_admits_priority(
    world: &mut BoardWorld,
    priority: String,
) -> Result<(), eyre::Report> {
    let filter = PriorityFilter::parse(&priority)
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    world
        .session_mut()?
        .set_criteria(FilterCriteria::new().with_priority(filter));
    Ok(())
}
