use std::env;
use std::fs;
use std::path::Path;

// Stage the launch dataset CSV into OUT_DIR for include_str!. When the
// fixture is absent (fresh checkout before `slr-cli fetch` has run), a
// small sample keeps the app buildable.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    let fixture = Path::new("../fixtures/spacex_launch_dash.csv");
    if fixture.exists() {
        fs::copy(fixture, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             0,1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n\
             1,2,KSC LC-39A,1,2490,F9 FT,FT\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
