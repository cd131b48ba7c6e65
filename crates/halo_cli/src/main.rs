//! Halo CLI
//!
//! Inspect themes, resolve component styles, and print corner geometry.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use halo_animation::{sequence, staggered, total_span, AnimationConfig};
use halo_core::{Color, InteractionPhase, InteractionState, Point, Rect};
use halo_paint::{build_corner_path, clamp_radius, CornerRadii, Corners, Path, PathCommand};
use halo_theme::{
    AnimationRole, AnimationToken, ColorToken, ElevationLevel, RadiusToken, SpacingToken, Theme,
    TypographyToken,
};
use halo_widgets::{
    resolve_style, transition_animation, ButtonAttributes, ButtonSize, ButtonVariant,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod theme_source;
mod timing;

#[derive(Parser)]
#[command(name = "halo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Halo design system CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Built-in theme (light, dark) or path to a theme file
    #[arg(short, long, global = true, default_value = "light")]
    theme: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the theme's design tokens
    Tokens {
        /// Token family to print
        #[arg(short, long, value_enum, default_value_t = TokenSet::All)]
        set: TokenSet,
    },

    /// Resolve button attributes for one interaction state
    Resolve {
        /// Button variant (primary, secondary, text, destructive)
        #[arg(long, default_value = "primary")]
        variant: ButtonVariant,

        /// Button size (small, medium, large)
        #[arg(long, default_value = "medium")]
        size: ButtonSize,

        #[arg(long, value_enum, default_value_t = StateArg::Idle)]
        state: StateArg,
    },

    /// Resolve every variant in every interaction state
    Preview {
        /// Button size (small, medium, large)
        #[arg(long, default_value = "medium")]
        size: ButtonSize,
    },

    /// Print the outline of a rectangle with rounded corners
    Corners {
        #[arg(long)]
        width: f32,

        #[arg(long)]
        height: f32,

        /// Requested corner radius; clamped to half the shorter side
        #[arg(short, long, allow_hyphen_values = true)]
        radius: f32,

        /// Comma separated corners to round (all, top, bottom_trailing, ...)
        #[arg(short, long, default_value = "all")]
        corners: Corners,

        /// Also print a polygon with this many segments per arc
        #[arg(long)]
        segments: Option<usize>,
    },

    /// Chain timings back to back
    Sequence {
        /// Token names or DURATION[:CURVE][+DELAY]
        #[arg(required = true)]
        timings: Vec<String>,
    },

    /// Start copies of one timing at a fixed interval
    Stagger {
        /// Token name or DURATION[:CURVE][+DELAY]
        #[arg(default_value = "standard")]
        timing: String,

        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,

        /// Seconds between starts
        #[arg(short, long, default_value_t = 0.1, allow_hyphen_values = true)]
        interval: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TokenSet {
    All,
    Colors,
    Typography,
    Spacing,
    Radius,
    Elevation,
    Animation,
}

impl TokenSet {
    fn includes(self, set: TokenSet) -> bool {
        self == TokenSet::All || self == set
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StateArg {
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

impl From<StateArg> for InteractionState {
    fn from(state: StateArg) -> Self {
        let phase = match state {
            StateArg::Idle => InteractionPhase::Idle,
            StateArg::Hovered => InteractionPhase::Hovered,
            StateArg::Pressed => InteractionPhase::Pressed,
            StateArg::Disabled => InteractionPhase::Disabled,
        };
        phase.into()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let theme = theme_source::load_theme(&cli.theme)?;
    info!(theme = theme.name(), "theme ready");

    match cli.command {
        Commands::Tokens { set } => cmd_tokens(&theme, set, cli.json),

        Commands::Resolve {
            variant,
            size,
            state,
        } => cmd_resolve(&theme, variant, size, state.into(), cli.json),

        Commands::Preview { size } => cmd_preview(&theme, size, cli.json),

        Commands::Corners {
            width,
            height,
            radius,
            corners,
            segments,
        } => cmd_corners(
            Rect::new(0.0, 0.0, width, height),
            radius,
            corners,
            segments,
            cli.json,
        ),

        Commands::Sequence { timings } => {
            let configs = timings
                .iter()
                .map(|input| timing::parse_timing(input, theme.animation()))
                .collect::<Result<Vec<_>>>()?;
            print_schedule(&sequence(&configs), cli.json)
        }

        Commands::Stagger {
            timing: input,
            count,
            interval,
        } => {
            let config = timing::parse_timing(&input, theme.animation())?;
            print_schedule(&staggered(config, count, interval), cli.json)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_tokens(theme: &Theme, set: TokenSet, json: bool) -> Result<()> {
    if json {
        return match set {
            TokenSet::All => print_json(theme),
            TokenSet::Colors => print_json(theme.colors()),
            TokenSet::Typography => print_json(theme.typography()),
            TokenSet::Spacing => print_json(theme.spacing()),
            TokenSet::Radius => print_json(theme.radii()),
            TokenSet::Elevation => print_json(theme.elevation()),
            TokenSet::Animation => print_json(theme.animation()),
        };
    }

    println!("{} ({:?})", theme.name(), theme.color_scheme());

    if set.includes(TokenSet::Colors) {
        println!("\ncolors");
        for token in ColorToken::ALL {
            println!("  {:<28} {}", token.name(), theme.color(token));
        }
    }

    if set.includes(TokenSet::Typography) {
        println!("\ntypography");
        for token in TypographyToken::ALL {
            let font = theme.typography().get(token);
            println!(
                "  {:<12} {:>5.1}pt  weight {}{}{}",
                token.name(),
                font.size,
                font.weight.value(),
                if font.monospace { "  mono" } else { "" },
                if font.italic { "  italic" } else { "" },
            );
        }
    }

    if set.includes(TokenSet::Spacing) {
        println!("\nspacing");
        for token in SpacingToken::ALL {
            println!("  {:<6} {:>5.1}", token.name(), theme.spacing().get(token));
        }
    }

    if set.includes(TokenSet::Radius) {
        println!("\nradius");
        for token in RadiusToken::ALL {
            println!("  {:<6} {:>7.1}", token.name(), theme.radii().get(token));
        }
    }

    if set.includes(TokenSet::Elevation) {
        println!("\nelevation");
        for level in ElevationLevel::ALL {
            let shadow = theme.elevation().get(level);
            println!(
                "  {:<7} blur {:>4.1}  y {:>4.1}  opacity {:.2}",
                level.name(),
                shadow.blur_radius,
                shadow.offset_y,
                shadow.opacity
            );
        }
    }

    if set.includes(TokenSet::Animation) {
        println!("\nanimation");
        for token in AnimationToken::ALL {
            let config = theme.animation().get(token);
            println!(
                "  {:<10} {:>6.0}ms  {}",
                token.name(),
                config.duration * 1000.0,
                config.curve.name()
            );
        }
        println!("\nroles");
        for role in AnimationRole::ALL {
            println!("  {:<18} -> {}", role.name(), role.token().name());
        }
    }

    Ok(())
}

fn cmd_resolve(
    theme: &Theme,
    variant: ButtonVariant,
    size: ButtonSize,
    state: InteractionState,
    json: bool,
) -> Result<()> {
    let attrs = resolve_style(variant, size, state, theme);
    if json {
        return print_json(&attrs);
    }

    println!("{} {} ({:?})", variant, size, state.phase());
    print_attributes(&attrs, theme.colors().background);
    Ok(())
}

fn print_attributes(attrs: &ButtonAttributes, backdrop: Color) {
    println!("  fill        {}", attrs.fill_color);
    if attrs.border_width > 0.0 {
        println!("  border      {} ({}px)", attrs.border_color, attrs.border_width);
    } else {
        println!("  border      none");
    }
    println!("  text        {}", attrs.text_color);
    println!(
        "  font        {:.1}pt weight {}",
        attrs.font.size,
        attrs.font.weight.value()
    );
    println!("  radius      {:.1}", attrs.corner_radius);
    println!(
        "  padding     {:.1} x {:.1}",
        attrs.horizontal_padding, attrs.vertical_padding
    );
    println!("  min size    {:.0} x {:.0}", attrs.min_width, attrs.min_height);
    println!("  scale       {:.2}", attrs.scale);
    if attrs.shadow.is_none() {
        println!("  shadow      none");
    } else {
        println!(
            "  shadow      blur {:.1} y {:.1} opacity {:.2}",
            attrs.shadow.blur_radius, attrs.shadow.offset_y, attrs.shadow.opacity
        );
    }
    println!("  contrast    {:.2}", attrs.text_contrast(backdrop));
}

#[derive(Serialize)]
struct PreviewRow {
    variant: ButtonVariant,
    state: InteractionPhase,
    attributes: ButtonAttributes,
    contrast: f32,
    /// Animation into this state from idle
    transition: AnimationConfig,
}

fn cmd_preview(theme: &Theme, size: ButtonSize, json: bool) -> Result<()> {
    let backdrop = theme.colors().background;
    let rows: Vec<PreviewRow> = ButtonVariant::ALL
        .into_iter()
        .flat_map(|variant| {
            [
                InteractionState::IDLE,
                InteractionState::HOVERED,
                InteractionState::PRESSED,
                InteractionState::DISABLED,
            ]
            .into_iter()
            .map(move |state| {
                let attributes = resolve_style(variant, size, state, theme);
                PreviewRow {
                    variant,
                    state: state.phase(),
                    attributes,
                    contrast: attributes.text_contrast(backdrop),
                    transition: transition_animation(InteractionState::IDLE, state, theme),
                }
            })
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!("{} / {}", theme.name(), size);
    println!(
        "{:<12} {:<9} {:<10} {:<10} {:<10} {:>5} {:>8} {:>8}",
        "variant", "state", "fill", "text", "border", "scale", "contrast", "anim"
    );
    for row in &rows {
        let attrs = &row.attributes;
        let border = if attrs.border_width > 0.0 {
            attrs.border_color.to_hex()
        } else {
            "-".to_string()
        };
        println!(
            "{:<12} {:<9} {:<10} {:<10} {:<10} {:>5.2} {:>8.2} {:>6.0}ms",
            row.variant.name(),
            format!("{:?}", row.state).to_lowercase(),
            attrs.fill_color.to_hex(),
            attrs.text_color.to_hex(),
            border,
            attrs.scale,
            row.contrast,
            row.transition.duration * 1000.0
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct CornerReport<'a> {
    requested_radius: f32,
    radius: f32,
    corners: Corners,
    radii: CornerRadii,
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon: Option<Vec<Point>>,
}

fn cmd_corners(
    rect: Rect,
    radius: f32,
    corners: Corners,
    segments: Option<usize>,
    json: bool,
) -> Result<()> {
    let path = build_corner_path(rect, radius, corners);
    let report = CornerReport {
        requested_radius: radius,
        radius: clamp_radius(&rect, radius),
        corners,
        radii: CornerRadii::resolve(&rect, radius, corners),
        path: &path,
        polygon: segments.map(|n| path.flatten(n)),
    };
    if json {
        return print_json(&report);
    }

    for command in path.commands() {
        match command {
            PathCommand::MoveTo(p) => println!("M {:.2} {:.2}", p.x, p.y),
            PathCommand::LineTo(p) => println!("L {:.2} {:.2}", p.x, p.y),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
            } => println!(
                "A center {:.2} {:.2}  r {:.2}  {:.0}deg -> {:.0}deg",
                center.x,
                center.y,
                radius,
                start_angle.to_degrees(),
                end_angle.to_degrees()
            ),
            PathCommand::Close => println!("Z"),
        }
    }
    println!(
        "\n{} lines, {} arcs, radius {:.2} (requested {:.2})",
        path.line_count(),
        path.arc_count(),
        report.radius,
        report.requested_radius
    );

    if let Some(points) = &report.polygon {
        println!("\npolygon ({} points)", points.len());
        for point in points {
            println!("  {:.3} {:.3}", point.x, point.y);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Schedule<'a> {
    animations: &'a [AnimationConfig],
    total: f32,
}

fn print_schedule(configs: &[AnimationConfig], json: bool) -> Result<()> {
    let schedule = Schedule {
        animations: configs,
        total: total_span(configs),
    };
    if json {
        return print_json(&schedule);
    }

    for (index, config) in configs.iter().enumerate() {
        println!(
            "#{:<3} delay {:.3}s  duration {:.3}s  {}",
            index,
            config.delay,
            config.duration,
            config.curve.name()
        );
    }
    println!("total {:.3}s", schedule.total);
    Ok(())
}
