//! OBJ export followed by loading reproduces the exported surface.

use glam::DVec3;
use swept_curve::{eval_bspline_seeded, eval_circle};
use swept_surface::{
    make_generalized_cylinder, make_surface_of_revolution, make_surface_of_revolution_with,
    read_obj, to_obj_string, write_obj, RevolveParams, SeamMode, Surface,
};

fn round_trip(surface: &Surface) -> Surface {
    let mut buf = Vec::new();
    write_obj(&mut buf, surface).unwrap();
    read_obj(buf.as_slice()).unwrap().into_surface().unwrap()
}

#[test]
fn sphere_round_trips_exactly() {
    let profile = eval_circle(1.0, 8).unwrap();
    let sphere = make_surface_of_revolution(&profile, 8).unwrap();
    assert_eq!(round_trip(&sphere), sphere);
}

#[test]
fn bspline_vase_round_trips_exactly() {
    let points = [
        DVec3::new(0.3, -1.0, 0.0),
        DVec3::new(1.1, -0.7, 0.0),
        DVec3::new(0.45, 0.1, 0.0),
        DVec3::new(0.9, 0.7, 0.0),
        DVec3::new(0.25, 1.3, 0.0),
        DVec3::new(0.6, 1.6, 0.0),
    ];
    let profile = eval_bspline_seeded(&points, 7, Some(DVec3::Z)).unwrap();
    let vase = make_surface_of_revolution(&profile, 13).unwrap();
    assert_eq!(round_trip(&vase), vase);
}

#[test]
fn welded_torus_round_trips_exactly() {
    let profile = eval_circle(0.5, 10).unwrap();
    let sweep = eval_circle(2.0, 20).unwrap();
    let torus = make_generalized_cylinder(&profile, &sweep).unwrap();
    assert_eq!(round_trip(&torus), torus);

    let params = RevolveParams {
        steps: 9,
        seam: SeamMode::Welded,
    };
    let shifted: Vec<_> = profile
        .iter()
        .map(|p| {
            let mut p = *p;
            p.v.x += 2.0;
            p
        })
        .collect();
    let welded = make_surface_of_revolution_with(&shifted, &params).unwrap();
    assert_eq!(round_trip(&welded), welded);
}

#[test]
fn exported_text_reparses_to_same_records() {
    let profile = eval_circle(1.0, 4).unwrap();
    let sphere = make_surface_of_revolution(&profile, 4).unwrap();
    let text = to_obj_string(&sphere);
    let mesh = read_obj(text.as_bytes()).unwrap();

    assert_eq!(mesh.vertices, sphere.vertices());
    assert_eq!(mesh.normals, sphere.normals());
    assert_eq!(mesh.faces.len(), sphere.triangle_count());
    for (face, tri) in mesh.faces.iter().zip(sphere.triangles()) {
        assert_eq!(&face.vertices, tri);
        assert_eq!(face.normals, tri.map(Some));
    }
}
