// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted host driving a dual-axis legend.
//!
//! The "chart" here is a `Vec<LegendItem>` that applies every
//! [`LegendEffect`] the legend asks for and hands the new snapshot back, the
//! way a real chart would re-render. Time comes from a [`ManualClock`].
//!
//! Run:
//! - `RUST_LOG=chart_legend=debug cargo run -p legend_demos --example legend_walkthrough`

use chart_legend::{
    AxisGroup, BlurTarget, ChartLegend, ConfigError, Key, LegendConfig, LegendEffect, LegendItem,
    LegendProps, LegendType, Modifiers, ScrollViewport, TooltipContent, TriggerInput,
};
use kurbo::{Rect, Size};
use legend_debounce::{Clock, ManualClock};
use tracing_subscriber::EnvFilter;

type Id = &'static str;

struct Chart {
    items: Vec<LegendItem<Id>>,
}

impl Chart {
    /// Applies chart-facing effects. Returns `true` if the snapshot changed.
    fn apply(&mut self, effect: &LegendEffect<Id>) -> bool {
        match effect {
            LegendEffect::HighlightEnter(id) => {
                for item in &mut self.items {
                    item.highlighted = item.id == *id;
                }
                true
            }
            LegendEffect::HighlightExit => {
                for item in &mut self.items {
                    item.highlighted = false;
                }
                true
            }
            LegendEffect::VisibilityChange(visible) => {
                for item in &mut self.items {
                    item.visible = visible.contains(&item.id);
                }
                true
            }
            LegendEffect::Focus { group, id } => {
                println!("  host: focus {id} in {group:?} group");
                false
            }
            LegendEffect::Scroll { group, request } => {
                println!(
                    "  host: scroll {group:?} group to {:.0} ({:?})",
                    request.offset.y, request.behavior
                );
                false
            }
            LegendEffect::TooltipChanged(owner) => {
                println!("  host: tooltip now {owner:?}");
                false
            }
        }
    }

    fn describe(&self) -> String {
        self.items
            .iter()
            .map(|i| {
                let mark = match (i.visible, i.highlighted) {
                    (_, true) => "*",
                    (true, false) => "+",
                    (false, false) => "-",
                };
                format!("{mark}{}", i.id)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

type Provider = fn(&LegendItem<Id>) -> Option<TooltipContent>;

fn tooltip_for(item: &LegendItem<Id>) -> Option<TooltipContent> {
    Some(TooltipContent {
        header: item.name.clone(),
        body: format!("{} series", if item.opposite_axis { "right" } else { "left" }),
        footer: None,
    })
}

/// Polls due timers, feeds effects to the chart, and re-syncs the legend.
fn settle(legend: &mut ChartLegend<Id, Provider>, chart: &mut Chart, clock: &ManualClock) {
    legend.poll(clock.now_ms());
    let mut changed = false;
    for effect in legend.drain_effects() {
        changed |= chart.apply(&effect);
    }
    if changed {
        legend.set_items(chart.items.clone(), clock.now_ms());
        for effect in legend.drain_effects() {
            chart.apply(&effect);
        }
    }
    println!("  chart: {}", chart.describe());
}

/// Advances to the next legend deadline, if any, and settles.
fn run_timers(legend: &mut ChartLegend<Id, Provider>, chart: &mut Chart, clock: &mut ManualClock) {
    while let Some(due) = legend.next_deadline() {
        clock.set(due);
        settle(legend, chart, clock);
    }
}

fn main() -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,chart_legend=debug".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut clock = ManualClock::new(0);
    let mut chart = Chart {
        items: vec![
            LegendItem::new("cpu", "CPU"),
            LegendItem::new("mem", "Memory"),
            LegendItem::new("net", "Network").on_opposite_axis(),
            LegendItem::new("disk", "Disk"),
            LegendItem::new("gpu", "GPU").on_opposite_axis(),
        ],
    };

    let mut legend: ChartLegend<Id, Provider> =
        ChartLegend::new(LegendConfig::default(), tooltip_for as Provider)?;
    legend.set_props(
        LegendProps::new(chart.items.clone())
            .with_type(LegendType::BottomRight)
            .with_titles(Some("Usage".into()), Some("Throughput".into()))
            .with_aria_label("Series")
            .with_actions(true),
        clock.now_ms(),
    );

    tracing::info!("layout");
    legend.set_container_width(640.0);
    println!("  640px: {:?}", legend.layout().kind);
    legend.set_container_width(320.0);
    println!("  320px: {:?}", legend.layout().kind);
    println!("  action slot reserved: {}", legend.has_actions());
    for group in legend.groups() {
        let ids: Vec<_> = group.items().iter().map(|i| i.id).collect();
        println!(
            "  {:?} toolbar {:?}: {ids:?}, tab stop {:?}",
            group.axis(),
            group.title(),
            group.tab_stop()
        );
    }

    // Give the default group a short scrolling container.
    legend.set_viewport(
        AxisGroup::Default,
        ScrollViewport::new(Size::new(120.0, 40.0), Size::new(120.0, 60.0)),
    );
    for (row, id) in ["cpu", "mem", "disk"].into_iter().enumerate() {
        let y = 20.0 * row as f64;
        legend.set_item_bounds(&id, Rect::new(0.0, y, 120.0, y + 20.0));
    }

    tracing::info!("hover mem, then move to cpu");
    legend.handle_item_input(&"mem", TriggerInput::PointerEnter, clock.now_ms());
    settle(&mut legend, &mut chart, &clock);
    clock.advance(30);
    legend.handle_item_input(&"mem", TriggerInput::PointerLeave, clock.now_ms());
    clock.advance(10);
    legend.handle_item_input(&"cpu", TriggerInput::PointerEnter, clock.now_ms());
    run_timers(&mut legend, &mut chart, &mut clock);
    legend.handle_item_input(&"cpu", TriggerInput::PointerLeave, clock.now_ms());
    run_timers(&mut legend, &mut chart, &mut clock);

    tracing::info!("keyboard: focus cpu, arrow left wraps to disk");
    legend.handle_item_input(&"cpu", TriggerInput::Focus, clock.now_ms());
    let outcome =
        legend.handle_item_input(&"cpu", TriggerInput::KeyDown(Key::ArrowLeft), clock.now_ms());
    println!("  arrow left: {outcome:?}");
    legend.handle_item_input(
        &"cpu",
        TriggerInput::Blur(BlurTarget::Other),
        clock.now_ms(),
    );
    legend.handle_item_input(&"disk", TriggerInput::Focus, clock.now_ms());
    run_timers(&mut legend, &mut chart, &mut clock);

    tracing::info!("escape closes the tooltip");
    if legend.document_listener_active() {
        let outcome = legend.handle_document_key(Key::Escape, clock.now_ms());
        println!("  escape: {outcome:?}");
    }
    settle(&mut legend, &mut chart, &clock);

    tracing::info!("select net, select it again, toggle gpu");
    clock.advance(200);
    legend.handle_item_input(&"net", TriggerInput::Click(Modifiers::empty()), clock.now_ms());
    settle(&mut legend, &mut chart, &clock);
    legend.handle_item_input(&"net", TriggerInput::Click(Modifiers::empty()), clock.now_ms());
    settle(&mut legend, &mut chart, &clock);
    legend.handle_item_input(&"gpu", TriggerInput::Click(Modifiers::CTRL), clock.now_ms());
    settle(&mut legend, &mut chart, &clock);

    legend.teardown();
    Ok(())
}
