//! Minimal PDF assembly.
//!
//! Writes a PDF 1.4 document by hand: one page per planned slice, all pages
//! sharing a single DCTDecode image object so the JPEG payload is stored
//! once. Each page clips to the usable area and shifts the full image up by
//! its slice offset, so consecutive pages show consecutive bands.

use super::paginate::PaginationPlan;
use super::raster::RasterImage;

const PT_PER_MM: f64 = 72.0 / 25.4;

fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Assemble the final PDF from a rendered image and its slicing plan.
pub fn assemble_pdf(image: &RasterImage, plan: &PaginationPlan) -> Vec<u8> {
    let page_count = plan.page_count();
    let total_objects = 3 + 2 * page_count;

    let page_w = mm_to_pt(plan.geometry.page_width_mm);
    let page_h = mm_to_pt(plan.geometry.page_height_mm);
    let margin = mm_to_pt(plan.geometry.margin_mm);
    let usable_w = mm_to_pt(plan.geometry.usable_width_mm());
    let usable_h = mm_to_pt(plan.geometry.usable_height_mm());
    let scaled_h = mm_to_pt(plan.scaled_height_mm);

    let mut out: Vec<u8> = Vec::with_capacity(image.jpeg.len() + 4096);
    let mut offsets: Vec<usize> = Vec::with_capacity(total_objects);

    out.extend_from_slice(b"%PDF-1.4\n");

    // 1: document catalog
    offsets.push(out.len());
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    // 2: page tree
    offsets.push(out.len());
    let kids = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + i))
        .collect::<Vec<_>>()
        .join(" ");
    out.extend_from_slice(
        format!("2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {page_count} >>\nendobj\n")
            .as_bytes(),
    );

    // 3: the shared JPEG image
    offsets.push(out.len());
    out.extend_from_slice(
        format!(
            "3 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            image.width_px,
            image.height_px,
            image.jpeg.len()
        )
        .as_bytes(),
    );
    out.extend_from_slice(&image.jpeg);
    out.extend_from_slice(b"\nendstream\nendobj\n");

    // 4..: page objects
    for i in 0..page_count {
        offsets.push(out.len());
        out.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /XObject << /Im0 3 0 R >> >> /Contents {} 0 R >>\nendobj\n",
                4 + i,
                page_w,
                page_h,
                4 + page_count + i
            )
            .as_bytes(),
        );
    }

    // content streams: clip to the usable window, then draw the full image
    // with its top edge raised by this slice's offset
    for (i, page) in plan.pages.iter().enumerate() {
        offsets.push(out.len());
        let y_top = page_h - margin + mm_to_pt(page.offset_mm);
        let y_bottom = y_top - scaled_h;
        let content = format!(
            "q\n{margin:.2} {margin:.2} {usable_w:.2} {usable_h:.2} re W n\n\
             {usable_w:.2} 0 0 {scaled_h:.2} {margin:.2} {y_bottom:.2} cm\n/Im0 Do\nQ\n"
        );
        out.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
                4 + page_count + i,
                content.len(),
                content
            )
            .as_bytes(),
        );
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", total_objects + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            total_objects + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}
