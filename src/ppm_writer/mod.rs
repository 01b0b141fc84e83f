use crate::renderer::Canvas;


const MAX_COLOUR_VALUE: usize = 255;

pub fn write_ppm(canvas: &Canvas) -> String {
    let header = ppm_header(canvas.width(), canvas.height());
    let pixels = pixel_data(canvas);

    format!("{}{}", header, pixels)
}

fn ppm_header(width: usize, height: usize) -> String {
    // P3 - PPM version magic number
    // width height - output size
    // 255 - colour range (0 - 255)
    format!("P3\n{} {}\n{}\n", width, height, MAX_COLOUR_VALUE)
}

fn pixel_data(canvas: &Canvas) -> String {
    let mut out = String::new();

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let colour = canvas.get(x as _, y as _);
            out.push_str(&format!(
                "{} {} {}\n",
                ppm_colour_value(colour.red()),
                ppm_colour_value(colour.green()),
                ppm_colour_value(colour.blue()),
            ));
        }
    }

    out
}

fn ppm_colour_value(raw: f64) -> usize {
    if raw < 0.0 {
        0
    } else if raw >= 1.0 {
        MAX_COLOUR_VALUE
    } else {
        (raw * (MAX_COLOUR_VALUE as f64)).round() as _
    }
}
