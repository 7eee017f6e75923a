use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::helper::marker::{ChromosomeDistribution, SummaryStatistics, Zygosity};

const HETEROZYGOUS_COLOR: RGBColor = RGBColor(31, 119, 180);
const HOMOZYGOUS_COLOR: RGBColor = RGBColor(255, 127, 14);
const BAR_MARGIN: u32 = 8;

/// Stacked bar chart of homozygous vs heterozygous markers per chromosome.
pub fn plot_chromosome_distribution(
    distribution: &ChromosomeDistribution,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if distribution.is_empty() {
        return Err("No classified markers to plot".into());
    }

    let chromosomes: Vec<&str> = distribution
        .chromosomes()
        .iter()
        .map(|(c, _)| c.as_str())
        .collect();
    let n = chromosomes.len();
    let y_max = (distribution.max_total() as f64 * 1.1).ceil();

    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Homozygous vs. Heterozygous Markers per Chromosome",
            ("sans-serif", 28).into_font(),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n - 1).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Chromosome")
        .y_desc("Number of Markers")
        .axis_desc_style(("sans-serif", 18))
        .x_labels(n)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) => {
                chromosomes.get(*i).map(|c| c.to_string()).unwrap_or_default()
            }
            _ => String::new(),
        })
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    // heterozygous at the bottom of each bar, homozygous stacked on top
    for zygosity in Zygosity::ALL {
        let color = match zygosity {
            Zygosity::Heterozygous => HETEROZYGOUS_COLOR,
            Zygosity::Homozygous => HOMOZYGOUS_COLOR,
        };
        chart
            .draw_series(distribution.chromosomes().iter().enumerate().map(|(i, (_, c))| {
                let bottom = match zygosity {
                    Zygosity::Heterozygous => 0,
                    Zygosity::Homozygous => c.heterozygous(),
                };
                let right = if i + 1 < n {
                    SegmentValue::Exact(i + 1)
                } else {
                    SegmentValue::Last
                };
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), bottom as f64),
                        (right, (bottom + c.get(zygosity)) as f64),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
                bar
            }))?
            .label(zygosity.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Pie chart of the overall heterozygous/homozygous split, percentages
/// printed on each wedge.
pub fn plot_zygosity_split(
    summary: &SummaryStatistics,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if summary.is_empty() {
        return Err("No classified markers to plot".into());
    }

    let root = BitMapBackend::new(output_path, (600, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    root.titled(
        "Predicted Progeny Zygosity",
        ("sans-serif", 28).into_font(),
    )?;

    // the pie is positioned in backend pixels, below the title band
    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2 + 20);
    let radius = width.min(height) as f64 * 0.35;
    let sizes = [
        summary.heterozygous_count() as f64,
        summary.homozygous_count() as f64,
    ];
    let colors = [HETEROZYGOUS_COLOR, HOMOZYGOUS_COLOR];
    let labels = Zygosity::ALL.map(|z| z.as_str());

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 18).into_font().color(&WHITE));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
