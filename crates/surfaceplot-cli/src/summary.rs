use std::path::{Path, PathBuf};

use console::Style;
use surfaceplot_core::controller::InteractionController;
use surfaceplot_core::points::{Axis, PointSet};
use surfaceplot_core::table::format_coord;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_range(s: &Styles, label: &str, (lo, hi): (f64, f64)) {
    println!(
        "    {:<12}{} .. {}",
        s.label.apply_to(label),
        s.value.apply_to(format_coord(lo)),
        s.value.apply_to(format_coord(hi))
    );
}

pub fn print_points_summary(file: &Path, points: &PointSet, resolution: usize) {
    let s = Styles::new();
    print_title(&s, "Point Set");

    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(file.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Points"),
        s.value.apply_to(points.len())
    );
    println!();

    println!("  {}", s.header.apply_to("Coordinates"));
    let distinct_x = points.distinct_count(Axis::X);
    let distinct_y = points.distinct_count(Axis::Y);
    println!(
        "    {:<12}{}",
        s.label.apply_to("Distinct x"),
        s.value.apply_to(distinct_x)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Distinct y"),
        s.value.apply_to(distinct_y)
    );
    print_range(&s, "x", points.range(Axis::X));
    print_range(&s, "y", points.range(Axis::Y));

    let values = points.values();
    let (z_min, z_max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    print_range(&s, "z", (z_min, z_max));
    println!();

    println!("  {}", s.header.apply_to("Grid"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(resolution)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{} x {}",
            distinct_x * resolution,
            distinct_y * resolution
        ))
    );
    println!();
}

pub fn print_field_summary(controller: &InteractionController) {
    let s = Styles::new();
    print_title(&s, controller.title().unwrap_or("Surface"));

    println!(
        "  {:<14}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(controller.method())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(controller.resolution())
    );

    let Some(field) = controller.field() else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Field"),
            s.disabled.apply_to("none")
        );
        return;
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{} x {}", field.cols(), field.rows()))
    );

    let nan = field.nan_count();
    if nan > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Undefined"),
            s.disabled.apply_to(format!("{nan} samples outside the hull"))
        );
    }

    match controller.data_range() {
        Some(range) => {
            println!("  {}", s.header.apply_to("Data Range"));
            println!(
                "    {:<12}{}",
                s.label.apply_to("Max"),
                s.value.apply_to(range.max)
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Min"),
                s.value.apply_to(range.min)
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Delta"),
                s.value.apply_to(range.delta)
            );
        }
        None => println!(
            "  {:<14}{}",
            s.header.apply_to("Data Range"),
            s.disabled.apply_to("all samples undefined")
        ),
    }
    println!();
}

pub fn print_export_summary(written: &[PathBuf]) {
    let s = Styles::new();

    if written.is_empty() {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Export"),
            s.disabled.apply_to("nothing written")
        );
        return;
    }

    println!("  {}", s.header.apply_to("Export"));
    for (i, path) in written.iter().enumerate() {
        println!(
            "    {}. {}",
            s.label.apply_to(i + 1),
            s.path.apply_to(path.display())
        );
    }
    println!();
}
