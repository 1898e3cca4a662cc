use fresnel_array::FresnelArray;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "fresnel-array", about = "Fresnel array binary transmission")]
struct Opt {
    /// Aperture width [m]
    #[structopt(short, long)]
    width: Option<f64>,
    /// Number of Fresnel zones
    #[structopt(short, long)]
    zones: Option<usize>,
    /// Central square obstruction side [m]
    #[structopt(short, long)]
    obstruction: Option<f64>,
    /// Ring index offset
    #[structopt(long)]
    offset: Option<f64>,
    /// Design wavelength [m]
    #[structopt(long)]
    wavelength: Option<f64>,
    /// Ring half-width parameter
    #[structopt(long)]
    beta0: Option<f64>,
    /// Grid side [pixel]
    #[structopt(short, long, default_value = "2048")]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut array = FresnelArray::default();
    if let Some(arg) = opt.width {
        array = array.width(arg);
    }
    if let Some(arg) = opt.zones {
        array = array.zones(arg);
    }
    if let Some(arg) = opt.obstruction {
        array = array.obstruction(arg);
    }
    if let Some(arg) = opt.offset {
        array = array.offset(arg);
    }
    if let Some(arg) = opt.wavelength {
        array = array.wavelength(arg);
    }
    if let Some(arg) = opt.beta0 {
        array = array.beta0(arg);
    }

    println!("{}", array);
    let mask = array.transmission(opt.size)?;
    mask.summary();

    Ok(())
}
