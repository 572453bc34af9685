// Print SVG path data for a route polyline.
//
// Usage:
//   route-path [--clip x1,y1,x2,y2] [--outer] [--strict-tail] x,y x,y [x,y ...]

use route_spline::basics::{PointI, RectI};
use route_spline::{ClipMode, SplineBuilder, SvgPathWriter};
use std::process;

struct Options {
    clip: Option<RectI>,
    mode: ClipMode,
    strict_tail: bool,
    points: Vec<PointI>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            process::exit(1);
        }
    };

    let mut builder = SplineBuilder::new();
    builder.set_clip_cubic_tail(opts.strict_tail);

    let mut out = SvgPathWriter::new();
    let n = opts.points.len();
    let result = match opts.clip {
        Some(rect) => builder.build_clipped_spline(&mut out, &rect, &opts.points, 0, n, opts.mode),
        None => builder.build_spline(&mut out, &opts.points, 0, n),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    println!("{}", out.as_str());
}

fn print_usage() {
    eprintln!("route-path - SVG path data for a transit route polyline");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  route-path [--clip x1,y1,x2,y2] [--outer] [--strict-tail] x,y x,y [x,y ...]");
    eprintln!();
    eprintln!("  --clip x1,y1,x2,y2   Only draw pieces touching this rectangle.");
    eprintln!("  --outer              With --clip, draw pieces clear of the rectangle instead.");
    eprintln!("  --strict-tail        Also test the last segment of a 4-point run.");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        clip: None,
        mode: ClipMode::Inner,
        strict_tail: false,
        points: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--clip" => {
                i += 1;
                let value = args.get(i).ok_or("--clip needs x1,y1,x2,y2")?;
                let v = parse_ints(value, 4)?;
                let mut rect = RectI::new(v[0], v[1], v[2], v[3]);
                rect.normalize();
                opts.clip = Some(rect);
            }
            "--outer" => opts.mode = ClipMode::Outer,
            "--strict-tail" => opts.strict_tail = true,
            arg if arg.starts_with("--") => return Err(format!("Unknown option: {}", arg)),
            arg => {
                let v = parse_ints(arg, 2)?;
                opts.points.push(PointI::new(v[0], v[1]));
            }
        }
        i += 1;
    }

    if opts.mode == ClipMode::Outer && opts.clip.is_none() {
        return Err("--outer requires --clip".to_string());
    }
    Ok(opts)
}

fn parse_ints(s: &str, n: usize) -> Result<Vec<i32>, String> {
    let v = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Invalid integer list: {}", s))?;
    if v.len() != n {
        return Err(format!("Expected {} comma-separated integers: {}", n, s));
    }
    Ok(v)
}
