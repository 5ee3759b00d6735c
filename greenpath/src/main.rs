#![allow(clippy::cast_precision_loss)]

mod options;
mod progress;

use anyhow::Error as AnyError;
use clap::Parser;
use greengraph::{
    satmap::{GoogleStaticMaps, ImageryProvider, MapParams},
    Geocoder, Greengraph, GreengraphBuilder, Nominatim, SamplePoint,
};
use log::info;
use options::{Cli, Command as CliCmd};
use plotters::prelude::*;
use serde::Serialize;
use std::{io::Write, path::Path, time::Duration};
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let Cli {
        begin,
        end,
        steps,
        threshold,
        zoom,
        api_key,
        user_agent,
        timeout,
        cmd,
    } = Cli::parse();

    env_logger::init();

    let timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
    let geocoder = Nominatim::new(&user_agent, timeout)?;
    let imagery = GoogleStaticMaps::new(api_key, timeout)?;
    let graph = GreengraphBuilder::new()
        .start(begin)
        .end(end)
        .threshold(threshold)
        .map_params(MapParams {
            zoom,
            ..MapParams::default()
        })
        .build(geocoder, imagery)?;
    let steps = steps as usize;

    match cmd {
        CliCmd::Plot { out } => save_plot(&graph, &sample(&graph, steps)?, &out),
        CliCmd::Csv => print_csv(std::io::stdout().lock(), &sample(&graph, steps)?),
        CliCmd::Json => print_json(&sample(&graph, steps)?),
        CliCmd::Ascii => {
            plot_ascii(&sample(&graph, steps)?);
            Ok(())
        }
        CliCmd::Green { place, out } => save_green(&graph, &place, &out),
    }
}

/// Samples the whole path while displaying progress on stderr.
fn sample<G, I>(graph: &Greengraph<G, I>, steps: usize) -> Result<Vec<SamplePoint>, AnyError>
where
    G: Geocoder,
    I: ImageryProvider,
{
    let pb = progress::bar(format!("{} to {}", graph.start(), graph.end()), steps as u64);
    let samples = graph.sample_points_with(steps, |_, _| pb.inc(1))?;
    pb.finish_and_clear();
    Ok(samples)
}

fn save_plot<G, I>(
    graph: &Greengraph<G, I>,
    samples: &[SamplePoint],
    out: &Path,
) -> Result<(), AnyError>
where
    G: Geocoder,
    I: ImageryProvider,
{
    let max_green = samples.iter().map(|s| s.green_pixels).max().unwrap_or(0);
    let x_max = samples.len().saturating_sub(1).max(1) as f64;
    let y_max = max_green.max(1) as f64 * 1.1;

    let root = BitMapBackend::new(out, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Green between {} and {}", graph.start(), graph.end()),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Step")
        .y_desc("Green pixels")
        .draw()?;
    chart.draw_series(LineSeries::new(
        samples
            .iter()
            .enumerate()
            .map(|(idx, sample)| (idx as f64, sample.green_pixels as f64)),
        &GREEN,
    ))?;
    root.present()?;
    info!("saved plot to {out:?}");
    Ok(())
}

fn print_csv<W: Write>(mut out: W, samples: &[SamplePoint]) -> Result<(), AnyError> {
    writeln!(out, "Step,Latitude,Longitude,Green")?;
    for (step, sample) in samples.iter().enumerate() {
        let latitude = sample.location.y;
        let longitude = sample.location.x;
        let green = sample.green_pixels;
        writeln!(out, "{step},{latitude},{longitude},{green}")?;
    }
    Ok(())
}

fn print_json(samples: &[SamplePoint]) -> Result<(), AnyError> {
    let json = serde_json::to_string(&json_entries(samples))?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry {
    /// [latitude, longitude]
    location: [f64; 2],
    green: usize,
}

fn json_entries(samples: &[SamplePoint]) -> Vec<JsonEntry> {
    samples
        .iter()
        .map(|sample| JsonEntry {
            location: [sample.location.y, sample.location.x],
            green: sample.green_pixels,
        })
        .collect()
}

fn plot_ascii(samples: &[SamplePoint]) {
    let plot_data: Vec<(f32, f32)> = samples
        .iter()
        .enumerate()
        .map(|(idx, sample)| (idx as f32, sample.green_pixels as f32))
        .collect();
    Chart::new(300, 150, 0.0, plot_data.len() as f32)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}

/// Writes the green pixels of the map centered on `place` to `out`.
fn save_green<G, I>(graph: &Greengraph<G, I>, place: &str, out: &Path) -> Result<(), AnyError>
where
    G: Geocoder,
    I: ImageryProvider,
{
    let location = graph.geolocate(place)?;
    let map = graph.sample_at(location)?;
    let green = map.count_green(graph.threshold())?;
    std::fs::write(out, map.render_green(graph.threshold())?)?;
    println!("{place}: {green} green pixels, saved to {}", out.display());
    Ok(())
}
